// SPDX-License-Identifier: MIT

pub mod condition;
pub mod context;
pub mod error;
pub mod loader;

// SPDX-License-Identifier: MIT

pub mod hackberry;

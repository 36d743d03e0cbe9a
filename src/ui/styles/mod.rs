// SPDX-License-Identifier: MPL-2.0
//! Widget styles.

pub mod bubble;

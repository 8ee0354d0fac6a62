// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the FOLIO application.

pub mod cards;
pub mod contact;
pub mod embed;
pub mod header;
pub mod hero;

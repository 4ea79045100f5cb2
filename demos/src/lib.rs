// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared glue for the Gyre demos.
//!
//! The demos have no windowing stack on purpose: the engine's host surface
//! is a handful of numbers and flags, so a synthetic host that renders them
//! as text is enough to watch the state machine work.

pub mod host;

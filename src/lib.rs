//! nuromancy: an Arabic-to-Roman numeral conversion service.
//!
//! The crate splits into a pure conversion core and thin HTTP plumbing
//! around it:
//!
//! - [`convert`]: parse a decimal string, check it against the
//!   supported range (1 to 3999), encode it in classical subtractive
//!   notation, with a batch variant over a closed range. Plain
//!   functions, no state, no I/O.
//! - [`api`]: the axum surface. `GET /` serves a small conversion form;
//!   `GET /romannumeral` answers single (`?query=`) and range
//!   (`?min=&max=`) conversions as JSON.
//! - [`config`] and [`telemetry`]: startup wiring, injected from `main`
//!   rather than held in globals.

pub mod api;
pub mod config;
pub mod convert;
pub mod telemetry;

//! Shared test harness modules for the Hotelier CLI.

use super::*;

mod command_steps;
mod helpers;
mod unit;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process exit statuses.

use std::process::ExitCode;

use darray::DynamicArrayError;
use thiserror::Error;

use crate::correct::CorrectError;
use crate::fit::FitError;
use crate::points::PointsError;

/// The command line named no subcommand the binary knows how to run.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(pub String);

/// Distinguished exit statuses of the `darray` binary.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum Status {
    /// Completed normally.
    Success = 0,
    /// Invalid command line.
    SyntaxError = 1,
    /// The input file could not be opened.
    FileNotFound = 2,
    /// A buffer could not be allocated or grown.
    AllocationFailure = 3,
    /// The numeric solve failed.
    NumericFailure = 4,
    /// The input is not in the expected format.
    MalformedInput = 5,
    /// Reading or writing a stream failed, or any unclassified failure.
    IoFailure = 6,
}

impl Status {
    /// Picks the status for `err` from the first recognised cause in its chain.
    pub fn classify(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(err) = cause.downcast_ref::<PointsError>() {
                return match err {
                    PointsError::Open { .. } => Self::FileNotFound,
                    PointsError::Read(_) => Self::IoFailure,
                    PointsError::Parse { .. } => Self::MalformedInput,
                    PointsError::Storage(_) => Self::AllocationFailure,
                };
            }
            if cause.downcast_ref::<DynamicArrayError>().is_some() {
                return Self::AllocationFailure;
            }
            if let Some(err) = cause.downcast_ref::<FitError>() {
                return match err {
                    FitError::InvalidOrder(_) => Self::SyntaxError,
                    _ => Self::NumericFailure,
                };
            }
            if let Some(err) = cause.downcast_ref::<CorrectError>() {
                return match err {
                    CorrectError::Io(_) => Self::IoFailure,
                    _ => Self::MalformedInput,
                };
            }
            if cause.downcast_ref::<UnknownCommand>().is_some() {
                return Self::SyntaxError;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return Self::IoFailure;
            }
        }

        Self::IoFailure
    }

    /// Numeric value passed to the operating system.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

use crate::coercion::CoercionError;
use crate::coercion::CoercionErrorReport;
use inherent::inherent;
use std::convert::Infallible;

/// Receives each [`CoercionErrorReport`] at the moment coercion discovers it
/// and decides whether coercion continues (`Ok`) or aborts (`Err`).
///
/// Any `FnMut(CoercionErrorReport) -> Result<(), E>` closure is a sink.
pub trait CoercionErrorSink {
    type Error;

    fn on_error(&mut self, report: CoercionErrorReport) -> Result<(), Self::Error>;
}
impl<F, E> CoercionErrorSink for F
where
    F: FnMut(CoercionErrorReport) -> Result<(), E>,
{
    type Error = E;

    fn on_error(&mut self, report: CoercionErrorReport) -> Result<(), E> {
        self(report)
    }
}

/// Aborts on the first error, returning it with its message prefixed by the
/// invalid value and path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailFast;

#[inherent]
impl CoercionErrorSink for FailFast {
    type Error = CoercionError;

    pub fn on_error(&mut self, report: CoercionErrorReport) -> Result<(), CoercionError> {
        Err(report.into_prefixed_error())
    }
}

/// Collects every error and never aborts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectErrors {
    reports: Vec<CoercionErrorReport>,
}
impl CollectErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_reports(self) -> Vec<CoercionErrorReport> {
        self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[CoercionErrorReport] {
        self.reports.as_slice()
    }
}

#[inherent]
impl CoercionErrorSink for CollectErrors {
    type Error = Infallible;

    pub fn on_error(&mut self, report: CoercionErrorReport) -> Result<(), Infallible> {
        self.reports.push(report);
        Ok(())
    }
}

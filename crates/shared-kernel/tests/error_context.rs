// crates/shared-kernel/tests/error_context.rs
use student_analytics_shared_kernel::{AnalyticsError, ErrorContext, InfraResult, InfrastructureError};

fn boom() -> InfraResult<()> {
    Err(InfrastructureError::ThreadPoolCreation { details: "root-pool".to_string() })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("building parallel engine").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("building parallel engine"));
    assert!(display.contains("Infrastructure error:"));
    assert!(display.contains("root-pool"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let err = boom().with_context(|| format!("jobs={}", 4)).unwrap_err();

    match err {
        AnalyticsError::Context { context, source } => {
            assert_eq!(context, "jobs=4");
            assert!(matches!(*source, AnalyticsError::Infrastructure(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

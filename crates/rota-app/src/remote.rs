use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rota_ports::error::PortError;
use tracing::debug;

use crate::error::{AppError, Step};

/// Awaits one remote call under a deadline and attributes any failure to
/// `step` and `target`.
pub(crate) async fn call<T, F>(
    step: Step,
    target: impl Display,
    deadline: Duration,
    fut: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, PortError>>,
{
    debug!(step = %step, target = %target, "remote call");

    match tokio::time::timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(AppError::Remote {
            step,
            target: target.to_string(),
            source,
        }),
        Err(_) => Err(AppError::Timeout {
            step,
            target: target.to_string(),
            after: deadline,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_passes_value_through() {
        let value = call(Step::GetUser, "u-1", Duration::from_secs(1), async {
            Ok::<_, PortError>(7)
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn port_error_is_wrapped_with_step() {
        let err = call(Step::GetEscalation, "esc-1", Duration::from_secs(1), async {
            Err::<(), _>(PortError::NotFound)
        })
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Remote {
                step: Step::GetEscalation,
                source: PortError::NotFound,
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_times_out() {
        let err = call(Step::GetTimeline, "sched-1", Duration::from_secs(5), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, PortError>(())
        })
        .await
        .unwrap_err();
        match err {
            AppError::Timeout { step, target, after } => {
                assert_eq!(step, Step::GetTimeline);
                assert_eq!(target, "sched-1");
                assert_eq!(after, Duration::from_secs(5));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

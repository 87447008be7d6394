use super::Result;
use std::{thread, time};

/// How long to back off when the VM wasn't permitted to run.
const IDLE_INTERVAL: time::Duration = time::Duration::from_micros(100);

pub enum Step {
    /// A cycle ran; go again right away.
    Cont,
    /// Nothing to do until the clock permits the next cycle.
    Idle,
    Done,
}

/// Calls `f` until it returns `Step::Done` or fails.
pub fn start_loop<F>(mut f: F) -> Result<()>
where
    F: FnMut() -> Result<Step>,
{
    loop {
        match f()? {
            Step::Cont => {}
            Step::Idle => thread::sleep(IDLE_INTERVAL),
            Step::Done => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_until_done() {
        let mut calls = 0;
        start_loop(|| {
            calls += 1;
            Ok(match calls {
                1 => Step::Idle,
                2 | 3 => Step::Cont,
                _ => Step::Done,
            })
        })
        .unwrap();
        assert_eq!(calls, 4);
    }

    #[test]
    fn stops_on_error() {
        let mut calls = 0;
        let result = start_loop(|| {
            calls += 1;
            if calls == 2 {
                bail!("boom");
            }
            Ok(Step::Cont)
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}

use crate::aa::SemanticsError;
use anyhow::Result;
use std::{fmt::Debug, sync::Arc};

/// The type of the functions used to interrupt a search.
///
/// The search stops as soon as the function returns `true`.
pub type InterruptFn = dyn Fn() -> bool + Send + Sync;

/// The options shared by the semantics solvers.
///
/// By default, searches cannot be interrupted.
/// An interruption check may be registered with [with_interrupt](Self::with_interrupt);
/// it is called before each branch expansion of the labelling searches,
/// and a search for which it returns `true` fails with an [Interrupted](SemanticsError::Interrupted) error.
///
/// # Example
///
/// ```
/// # use argsem::aa::{AAFramework, SemanticsError};
/// # use argsem::solvers::{ExtensionEnumerator, PreferredSemanticsSolver, SolverOptions};
/// # use std::sync::Arc;
/// # use std::sync::atomic::{AtomicBool, Ordering};
/// let af = AAFramework::new("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
/// let stop = Arc::new(AtomicBool::new(true));
/// let stop_flag = Arc::clone(&stop);
/// let options = SolverOptions::default().with_interrupt(move || stop_flag.load(Ordering::Relaxed));
/// let mut solver = PreferredSemanticsSolver::new_with_options(&af, options);
/// let err = solver.enumerate_extensions().unwrap_err();
/// assert_eq!(Some(&SemanticsError::Interrupted), err.downcast_ref::<SemanticsError>());
/// stop.store(false, Ordering::Relaxed);
/// assert_eq!(2, solver.enumerate_extensions().unwrap().len());
/// ```
#[derive(Clone, Default)]
pub struct SolverOptions {
    interrupt: Option<Arc<InterruptFn>>,
}

impl SolverOptions {
    /// Registers an interruption check, replacing the previous one.
    pub fn with_interrupt<F>(mut self, interrupt: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.interrupt = Some(Arc::new(interrupt));
        self
    }

    /// Returns `true` iff an interruption check is registered.
    pub fn is_interruptible(&self) -> bool {
        self.interrupt.is_some()
    }

    pub(crate) fn check_interrupt(&self) -> Result<()> {
        match &self.interrupt {
            Some(f) if f() => Err(SemanticsError::Interrupted.into()),
            _ => Ok(()),
        }
    }
}

impl Debug for SolverOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverOptions")
            .field("interruptible", &self.is_interruptible())
            .finish()
    }
}

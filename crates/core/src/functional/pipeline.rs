//! Multi-stage folds over ordered sequences
//!
//! A pipeline runs a stage function over every element and keeps only the
//! most recent result. Results are never combined: each stage invocation
//! overwrites the accumulator. The accumulator starts at `U::default()`, so an
//! empty sequence hands the default value straight to the terminal stage.
//! That is defined behavior, not an error.
//!
//! Any stage failure aborts the fold immediately; the terminal stage does not
//! run and no partial result is returned.

/// Fold `items` through `stage`, keeping the last result.
fn fold_last<I, U, E, F>(items: I, mut stage: F) -> Result<U, E>
where
    I: IntoIterator,
    U: Default,
    F: FnMut(I::Item) -> Result<U, E>,
{
    let mut accumulator = U::default();
    let mut folded = 0usize;

    for item in items {
        accumulator = stage(item)?;
        folded += 1;
    }

    tracing::trace!(elements = folded, "pipeline fold completed");
    Ok(accumulator)
}

/// Pipeline folds for any iterator
pub trait PipelineExt: Iterator + Sized {
    /// Fold every element through `stage` and return the last result.
    ///
    /// Returns `U::default()` for an empty sequence.
    fn fold_stage<U, E, F>(self, stage: F) -> Result<U, E>
    where
        U: Default,
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        fold_last(self, stage)
    }

    /// Like [`fold_stage`](Self::fold_stage), passing `context` unchanged to
    /// every invocation.
    fn fold_stage_with<C, U, E, F>(self, context: &C, mut stage: F) -> Result<U, E>
    where
        C: ?Sized,
        U: Default,
        F: FnMut(&C, Self::Item) -> Result<U, E>,
    {
        fold_last(self, |item| stage(context, item))
    }

    /// Fold every element through `stage`, then feed the last result to
    /// `terminal`.
    ///
    /// On an empty sequence `terminal` still runs, receiving `U::default()`.
    fn fold_pipeline<U, O, E, F, T>(self, stage: F, terminal: T) -> Result<O, E>
    where
        U: Default,
        F: FnMut(Self::Item) -> Result<U, E>,
        T: FnOnce(U) -> Result<O, E>,
    {
        let accumulator = fold_last(self, stage)?;
        terminal(accumulator)
    }

    /// Like [`fold_pipeline`](Self::fold_pipeline), passing `context`
    /// unchanged to every stage invocation and to the terminal stage.
    fn fold_pipeline_with<C, U, O, E, F, T>(
        self,
        context: &C,
        mut stage: F,
        terminal: T,
    ) -> Result<O, E>
    where
        C: ?Sized,
        U: Default,
        F: FnMut(&C, Self::Item) -> Result<U, E>,
        T: FnOnce(&C, U) -> Result<O, E>,
    {
        let accumulator = fold_last(self, |item| stage(context, item))?;
        terminal(context, accumulator)
    }
}

impl<I> PipelineExt for I where I: Iterator {}

/// A reusable per-element stage.
///
/// Build it once and run it against as many sequences as needed. Every run
/// follows the same fold contract as [`PipelineExt`].
///
/// ```
/// use tapline_core::functional::Pipeline;
///
/// let mut latest = Pipeline::new(|line: &str| line.parse::<u32>())
///     .then(|last: u32| Ok(last * 10));
///
/// assert_eq!(latest.run(["1", "2", "3"]), Ok(30));
/// assert_eq!(latest.run(Vec::<&str>::new()), Ok(0));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    stage: S,
}

impl<S> Pipeline<S> {
    /// Create a pipeline from a per-element stage
    pub fn new(stage: S) -> Self {
        Self { stage }
    }

    /// Attach a terminal stage that receives the final accumulator
    pub fn then<T>(self, terminal: T) -> TerminalPipeline<S, T> {
        TerminalPipeline {
            stage: self.stage,
            terminal,
        }
    }

    /// Fold `items` and return the last stage result
    pub fn run<I, U, E>(&mut self, items: I) -> Result<U, E>
    where
        I: IntoIterator,
        U: Default,
        S: FnMut(I::Item) -> Result<U, E>,
    {
        fold_last(items, &mut self.stage)
    }

    /// Fold `items`, handing `context` to every stage invocation
    pub fn run_with<C, I, U, E>(&mut self, context: &C, items: I) -> Result<U, E>
    where
        C: ?Sized,
        I: IntoIterator,
        U: Default,
        S: FnMut(&C, I::Item) -> Result<U, E>,
    {
        let stage = &mut self.stage;
        fold_last(items, |item| stage(context, item))
    }
}

/// A [`Pipeline`] followed by a terminal stage
#[derive(Debug, Clone)]
pub struct TerminalPipeline<S, T> {
    stage: S,
    terminal: T,
}

impl<S, T> TerminalPipeline<S, T> {
    /// Fold `items`, then run the terminal stage on the last result
    pub fn run<I, U, O, E>(&mut self, items: I) -> Result<O, E>
    where
        I: IntoIterator,
        U: Default,
        S: FnMut(I::Item) -> Result<U, E>,
        T: FnMut(U) -> Result<O, E>,
    {
        let accumulator = fold_last(items, &mut self.stage)?;
        (self.terminal)(accumulator)
    }

    /// Fold `items` and run the terminal stage, handing `context` to both
    pub fn run_with<C, I, U, O, E>(&mut self, context: &C, items: I) -> Result<O, E>
    where
        C: ?Sized,
        I: IntoIterator,
        U: Default,
        S: FnMut(&C, I::Item) -> Result<U, E>,
        T: FnMut(&C, U) -> Result<O, E>,
    {
        let stage = &mut self.stage;
        let accumulator = fold_last(items, |item| stage(context, item))?;
        (self.terminal)(context, accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Default, PartialEq)]
    struct Summary {
        label: String,
        size: usize,
    }

    #[test]
    fn test_fold_stage_keeps_last_result() {
        let result: Result<usize, ()> = vec!["a", "bbb", "cc"]
            .into_iter()
            .fold_stage(|s| Ok(s.len()));

        assert_eq!(result, Ok(2));
    }

    #[test]
    fn test_fold_stage_runs_in_order() {
        let order = RefCell::new(Vec::new());
        let _ = (1..=4).fold_stage(|x| {
            order.borrow_mut().push(x);
            Ok::<_, ()>(x)
        });

        assert_eq!(*order.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_sequence_yields_default() {
        let result: Result<Summary, ()> = std::iter::empty::<&str>().fold_stage(|s| {
            Ok(Summary {
                label: s.to_string(),
                size: s.len(),
            })
        });

        assert_eq!(result, Ok(Summary::default()));
    }

    #[test]
    fn test_terminal_runs_on_empty_sequence() {
        let terminal_calls = Cell::new(0);
        let result = std::iter::empty::<i32>().fold_pipeline(
            |x| Ok::<i64, String>(i64::from(x) * 2),
            |last| {
                terminal_calls.set(terminal_calls.get() + 1);
                Ok(format!("last={last}"))
            },
        );

        assert_eq!(result, Ok("last=0".to_string()));
        assert_eq!(terminal_calls.get(), 1);
    }

    #[test]
    fn test_terminal_receives_last_stage_result() {
        let result = vec![5, 9, 2].into_iter().fold_pipeline(
            |x| Ok::<_, String>(x * 100),
            |last| Ok(last + 1),
        );

        assert_eq!(result, Ok(201));
    }

    #[test]
    fn test_stage_failure_aborts_fold() {
        let visited = RefCell::new(Vec::new());
        let terminal_ran = Cell::new(false);

        let result = (1..=5).fold_pipeline(
            |x| {
                visited.borrow_mut().push(x);
                if x == 3 {
                    Err(format!("stage failed on {x}"))
                } else {
                    Ok(x)
                }
            },
            |last| {
                terminal_ran.set(true);
                Ok(last)
            },
        );

        assert_eq!(result, Err("stage failed on 3".to_string()));
        assert_eq!(*visited.borrow(), vec![1, 2, 3]);
        assert!(!terminal_ran.get());
    }

    #[test]
    fn test_terminal_failure_propagates() {
        let result: Result<i32, &str> =
            (1..3).fold_pipeline(|x| Ok(x), |_| Err("terminal refused"));

        assert_eq!(result, Err("terminal refused"));
    }

    #[test]
    fn test_context_passed_to_every_invocation() {
        let prefix = String::from("job");
        let seen = RefCell::new(Vec::new());

        let result = vec![1, 2, 3].into_iter().fold_pipeline_with(
            prefix.as_str(),
            |ctx, x| {
                seen.borrow_mut().push(ctx.to_string());
                Ok::<_, ()>(format!("{ctx}-{x}"))
            },
            |ctx, last| Ok(format!("{ctx}:{last}")),
        );

        assert_eq!(result, Ok("job:job-3".to_string()));
        assert_eq!(*seen.borrow(), vec!["job", "job", "job"]);
    }

    #[test]
    fn test_fold_stage_with_context() {
        let factor = 3;
        let result = vec![1, 4].into_iter().fold_stage_with(&factor, |f, x| {
            Ok::<_, ()>(f * x)
        });

        assert_eq!(result, Ok(12));
    }

    #[test]
    fn test_reusable_pipeline() {
        let mut pipeline = Pipeline::new(|x: i32| Ok::<_, String>(x + 1));

        assert_eq!(pipeline.run(vec![1, 2, 3]), Ok(4));
        assert_eq!(pipeline.run(Vec::<i32>::new()), Ok(0));
    }

    #[test]
    fn test_reusable_pipeline_with_terminal_and_context() {
        struct Scale(i32);

        let mut pipeline = Pipeline::new(|scale: &Scale, x: i32| Ok::<_, String>(x * scale.0))
            .then(|scale: &Scale, last: i32| Ok(last - scale.0));

        assert_eq!(pipeline.run_with(&Scale(10), [1, 2, 7]), Ok(60));
        assert_eq!(pipeline.run_with(&Scale(2), Vec::<i32>::new()), Ok(-2));
    }
}

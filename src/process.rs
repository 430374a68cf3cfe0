//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage and the whole chain inlines into straight-line calls.
//! DynamicProcess is the dynamic fallback for stages chosen at runtime.
use crate::stage::Stage;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        run_stage(&self.stage, current)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text);
        }
        text
    }
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if !stage.needs_apply(&text) {
        trace!(stage = stage.name(), "skipped");
        return text;
    }
    trace!(stage = stage.name(), len = text.len(), "applying");
    stage.apply(text)
}

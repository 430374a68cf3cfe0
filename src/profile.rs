pub mod preset;
use crate::{
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::borrow::Cow;
use tracing::trace;

/// A named, ordered chain of stages.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        trace!(profile = self.name, len = text.len(), "run");
        self.pipeline.process(text)
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}

impl Profile<DynamicProcess> {
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }
}

pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}

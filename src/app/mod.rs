// Application layer: concrete pipelines wired to real collaborators.

pub mod sim_pipeline;

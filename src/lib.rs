//! Reefdive library - underwater reef scene simulation

pub mod camera;
pub mod cli;
pub mod mesh;
pub mod params;
pub mod population;
pub mod rendering;
pub mod scene;
pub mod simulation;

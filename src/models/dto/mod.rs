pub mod request;

pub use request::{FinalExamRequestDto, ModuleRequestDto, PlanRequestDto};

pub mod a001_health_center;
pub mod a002_lab_guideline;
pub mod a003_free_event;
pub mod a004_health_awareness;

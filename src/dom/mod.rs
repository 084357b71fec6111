pub mod controller;
pub mod counter;
pub mod debounce;
pub mod frame;
pub mod listen;
pub mod observe;
pub mod perf;
pub mod reveal;

pub use controller::PageFx;
pub use counter::run_count_up;
pub use debounce::Debouncer;
pub use listen::Binding;
pub use observe::ObserveOnce;

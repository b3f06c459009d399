cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "arm", not(test)))] {
        mod arm;
        pub use arm::*;
    } else {
        mod host;
        pub use host::*;
    }
}

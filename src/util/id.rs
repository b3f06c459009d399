//! Macro for ID newtypes.

macro_rules! make_id {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(usize);

        impl $name {
            /// Allocate a fresh, never before seen ID.
            pub fn next() -> Self {
                static NEXT: core::sync::atomic::AtomicUsize =
                    core::sync::atomic::AtomicUsize::new(0);
                Self(NEXT.fetch_add(1, core::sync::atomic::Ordering::Relaxed))
            }
        }
    };
}

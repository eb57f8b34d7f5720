macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 3, idx & 7)
    }};
}

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "packed_bitarray", $($arg)*);
    }};
}

macro_rules! warn_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "packed_bitarray", $($arg)*);
    }};
}

pub(crate) use bitpos;
pub(crate) use trace_event;
pub(crate) use warn_event;

/// Normalised pointer tracking.
pub mod pointer;

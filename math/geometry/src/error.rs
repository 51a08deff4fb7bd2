#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
  #[error("segment start and end coincide, a degenerate segment has no direction")]
  Degenerate,
  #[error("segment endpoints are too far apart, the delta between them overflows")]
  UnrepresentableDirection,
}

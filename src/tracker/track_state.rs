/// Visibility state of a live tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched to a detection in the most recent frame
    #[default]
    Tracked,
    /// Still live but unmatched for one or more consecutive frames
    Lost,
}

//! Implementation details of the `intersection_test` function between bounding volumes.

pub use self::intersection_test_volume_volume::intersection_test_volume_volume;

mod intersection_test_volume_volume;

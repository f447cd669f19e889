use std::sync::Arc;
use tabled::Tabled;

pub type PlaneId = Arc<str>;

/// A row of the `ls` listing: the plane and the order it came in.
#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct Bay {
    pub bay: usize,
    pub plane: PlaneId,
}

impl Bay {
    pub fn list(planes: &[PlaneId]) -> Vec<Bay> {
        planes
            .iter()
            .enumerate()
            .map(|(i, plane)| Bay {
                bay: i + 1,
                plane: plane.clone(),
            })
            .collect()
    }
}

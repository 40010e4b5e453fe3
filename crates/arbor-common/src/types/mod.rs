//! Core type definitions for Arbor.
//!
//! Vertices are plain indices in `[0, V)`. The vertex set of a graph is fixed
//! when the graph is built, so there is no id allocator; callers simply count.

use crate::utils::error::{Error, Result};

/// A vertex index.
pub type Vertex = usize;

/// Checks that `vertex` lies in `[0, vertex_count)`.
///
/// # Errors
///
/// Returns [`Error::VertexOutOfBounds`] otherwise.
#[inline]
pub fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::VertexOutOfBounds {
            vertex,
            vertex_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_check_vertex_bounds() {
        assert!(check_vertex(0, 1).is_ok());
        assert!(check_vertex(5, 6).is_ok());
        assert_eq!(
            check_vertex(6, 6),
            Err(Error::VertexOutOfBounds {
                vertex: 6,
                vertex_count: 6
            })
        );
        assert!(check_vertex(0, 0).is_err());
    }

    proptest! {
        #[test]
        fn check_vertex_matches_range(vertex in 0usize..64, count in 0usize..64) {
            prop_assert_eq!(check_vertex(vertex, count).is_ok(), vertex < count);
        }
    }
}

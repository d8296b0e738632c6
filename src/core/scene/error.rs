//=========================================================================
// Scene Stack Errors
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::TryReserveError;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::SceneKey;
use crate::core::resources::ResourceError;

//=== StackError ==========================================================

/// Why a scene stack operation was rejected.
///
/// Only the construction failures are fatal. Every other variant leaves
/// the stack exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StackError<K: SceneKey> {
    /// Backing storage for the stack could not be reserved.
    #[error("failed to allocate scene stack storage for {capacity} entries")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// A stack must hold at least the root scene.
    #[error("scene stack capacity must be at least one entry")]
    ZeroCapacity,

    /// Push attempted on a full stack. The scene was dropped untouched.
    #[error("scene stack is full ({capacity} entries), {rejected:?} was not pushed")]
    CapacityExceeded { capacity: usize, rejected: K },

    /// Pop attempted on an empty stack.
    #[error("scene stack is empty")]
    EmptyStackUnderflow,

    /// Pop attempted while the top scene carries the root's key.
    #[error("scene {0:?} is the protected root and cannot be popped")]
    ProtectedScene(K),

    /// The scene's resource acquisition failed, so it was never pushed.
    #[error("scene {key:?} failed to acquire its resources")]
    Acquire {
        key: K,
        #[source]
        source: ResourceError,
    },
}

impl<K: SceneKey> StackError<K> {
    /// Returns `true` for errors the host cannot continue from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Allocation { .. } | Self::ZeroCapacity)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Menu,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn only_construction_errors_are_fatal() {
        assert!(StackError::<TestScene>::ZeroCapacity.is_fatal());
        assert!(!StackError::<TestScene>::EmptyStackUnderflow.is_fatal());
        assert!(!StackError::ProtectedScene(TestScene::Menu).is_fatal());
        assert!(!StackError::CapacityExceeded {
            capacity: 10,
            rejected: TestScene::Menu,
        }
        .is_fatal());
    }

    #[test]
    fn display_names_the_rejected_scene() {
        let err = StackError::CapacityExceeded {
            capacity: 10,
            rejected: TestScene::Menu,
        };
        assert_eq!(
            err.to_string(),
            "scene stack is full (10 entries), Menu was not pushed"
        );
    }

    #[test]
    fn acquire_error_exposes_source() {
        use std::error::Error as _;

        let err = StackError::Acquire {
            key: TestScene::Menu,
            source: ResourceError::NotFound(PathBuf::from("menu/background.png")),
        };
        assert!(err.source().is_some());
    }
}

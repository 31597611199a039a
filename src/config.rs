//! Session configuration.
//!
//! The host passes a plain JS object which is deserialized with camelCase
//! keys; every field is optional and falls back to the defaults below.
//! Values are fixed once the session is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{NodeId, Viewport};
use crate::kinematics::{BoundaryPolicy, KinematicsStepper};
use crate::render::RenderStyle;

/// Upper bound on node count. Face enumeration is cubic in N.
pub const MAX_NODES: usize = 64;

/// Height factor of the banner layout relative to the window.
pub const BANNER_HEIGHT_SCALE: f32 = 0.3;

/// Centroid radius of the banner layout.
pub const BANNER_MAX_RADIUS: f32 = 150.0;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("max speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("max radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("node count {count} exceeds the limit of {max}")]
    TooManyNodes { count: usize, max: usize },

    #[error("follower {follower} is out of range for {count} nodes")]
    FollowerOutOfRange { follower: u32, count: usize },
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub node_count: usize,
    pub width: f32,
    pub height: f32,
    /// Bound on each initial velocity component, in units per frame.
    pub max_speed: f32,
    /// Some(r) keeps every node within r of the centroid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_radius: Option<f32>,
    /// Node that follows the pointer.
    pub follower: u32,
    pub style: RenderStyle,
}

impl SessionConfig {
    /// Whole-window layout with plain edge reflection.
    pub fn full_viewport(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Short strip across the window, nodes held near their centroid.
    pub fn banner(window_width: f32, window_height: f32) -> Self {
        Self {
            width: window_width,
            height: window_height * BANNER_HEIGHT_SCALE,
            max_radius: Some(BANNER_MAX_RADIUS),
            style: RenderStyle::compact(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.max_speed));
        }
        if let Some(radius) = self.max_radius {
            if !positive(radius) {
                return Err(ConfigError::InvalidRadius(radius));
            }
        }
        if self.node_count > MAX_NODES {
            return Err(ConfigError::TooManyNodes {
                count: self.node_count,
                max: MAX_NODES,
            });
        }
        if self.node_count > 0 && self.follower as usize >= self.node_count {
            return Err(ConfigError::FollowerOutOfRange {
                follower: self.follower,
                count: self.node_count,
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn policy(&self) -> BoundaryPolicy {
        match self.max_radius {
            Some(max_radius) => BoundaryPolicy::CentroidConstrained { max_radius },
            None => BoundaryPolicy::Reflect,
        }
    }

    pub fn stepper(&self) -> KinematicsStepper {
        KinematicsStepper::new(self.viewport(), self.policy())
    }

    pub fn follower_id(&self) -> NodeId {
        NodeId(self.follower)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            node_count: 6,
            width: 800.0,
            height: 600.0,
            max_speed: 1.0,
            max_radius: None,
            follower: 0,
            style: RenderStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.policy(), BoundaryPolicy::Reflect);
        assert_eq!(config.follower_id(), NodeId(0));
    }

    #[test]
    fn test_banner_preset() {
        let config = SessionConfig::banner(1000.0, 1000.0);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.viewport(), Viewport::new(1000.0, 300.0));
        assert_eq!(
            config.policy(),
            BoundaryPolicy::CentroidConstrained { max_radius: 150.0 }
        );
        assert_eq!(config.style.node_radius, 3.0);
    }

    #[test]
    fn test_full_viewport_preset() {
        let config = SessionConfig::full_viewport(1280.0, 720.0);
        assert_eq!(config.viewport(), Viewport::new(1280.0, 720.0));
        assert_eq!(config.max_radius, None);
        assert_eq!(config.node_count, 6);
    }

    #[test]
    fn test_rejects_bad_viewport() {
        for (width, height) in [(0.0, 10.0), (10.0, -1.0), (f32::NAN, 10.0), (10.0, f32::INFINITY)] {
            let config = SessionConfig {
                width,
                height,
                ..SessionConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidViewport { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_bad_speed_and_radius() {
        let config = SessionConfig {
            max_speed: -1.0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(-1.0)));

        let config = SessionConfig {
            max_radius: Some(0.0),
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadius(0.0)));
    }

    #[test]
    fn test_rejects_oversized_graph() {
        let config = SessionConfig {
            node_count: MAX_NODES + 1,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyNodes {
                count: MAX_NODES + 1,
                max: MAX_NODES
            })
        );
    }

    #[test]
    fn test_follower_range() {
        let config = SessionConfig {
            follower: 6,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FollowerOutOfRange { follower: 6, count: 6 })
        ));

        // Empty graphs are allowed; the pointer simply has nothing to move.
        let config = SessionConfig {
            node_count: 0,
            follower: 3,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TooManyNodes { count: 70, max: 64 };
        assert_eq!(err.to_string(), "node count 70 exceeds the limit of 64");
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: SessionConfig = serde_json::from_str(
            r#"{"nodeCount": 9, "maxRadius": 120, "style": {"nodeRadius": 2}}"#,
        )
        .unwrap();

        assert_eq!(config.node_count, 9);
        assert_eq!(config.max_radius, Some(120.0));
        assert_eq!(config.width, 800.0);
        assert_eq!(config.style.node_radius, 2.0);
        assert_eq!(config.style.node_fill, "steelblue");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}

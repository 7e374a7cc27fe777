#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read {path}: {message}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum SnapshotError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "snapshot encode error: {e}"),
            Self::Decode(e) => write!(f, "snapshot decode error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Encode any snapshot value as MessagePack.
pub fn encode_snapshot<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, SnapshotError> {
    rmp_serde::to_vec(value).map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decode a MessagePack snapshot produced by [`encode_snapshot`].
pub fn decode_snapshot<T: for<'de> serde::Deserialize<'de>>(
    data: &[u8],
) -> Result<T, SnapshotError> {
    if data.is_empty() {
        return Err(SnapshotError::Decode("empty snapshot".to_string()));
    }
    rmp_serde::from_slice(data).map_err(|e| SnapshotError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{KinematicState, Vec2};

    #[test]
    fn empty_snapshot_rejected() {
        let err = decode_snapshot::<KinematicState>(&[]).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    #[test]
    fn garbage_snapshot_rejected() {
        let err = decode_snapshot::<KinematicState>(&[0xc1, 0x00]).unwrap_err();
        assert!(err.to_string().starts_with("snapshot decode error"));
    }

    #[test]
    fn state_snapshot_survives_encoding() {
        let mut state = KinematicState::launched(Vec2::new(0.5, 0.15), Vec2::new(10.0, 8.0));
        state.bounce_count = 2;
        state.trail.push(Vec2::new(3.0, 2.0));
        let data = encode_snapshot(&state).unwrap();
        let decoded: KinematicState = decode_snapshot(&data).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Io {
            path: "config/chipshot.toml".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config/chipshot.toml: not found"
        );
    }
}

use serde::{Deserialize, Serialize};

/// a row in the accumulated stops table and the node payload of the travel
/// graph. stop ids are namespaced with a `_<feedname>` suffix by the
/// normalizer so that identical raw ids from different feeds never collide.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    /// namespaced stop identifier
    pub stop_id: String,
    /// display name from the source feed
    pub stop_name: String,
    /// latitude in degrees
    pub stop_lat: f64,
    /// longitude in degrees
    pub stop_lon: f64,
}

impl Stop {
    /// the feed that published this stop, recovered from the id suffix
    /// appended during normalization. feed names must not contain `_`.
    pub fn publisher(&self) -> &str {
        self.stop_id.rsplit('_').next().unwrap_or(&self.stop_id)
    }
}

#[cfg(test)]
mod test {
    use super::Stop;

    fn mock_stop(stop_id: &str) -> Stop {
        Stop {
            stop_id: String::from(stop_id),
            stop_name: String::from("Deák Ferenc tér"),
            stop_lat: 47.497,
            stop_lon: 19.054,
        }
    }

    #[test]
    fn test_publisher_is_feed_suffix() {
        assert_eq!(mock_stop("1289_bkk").publisher(), "bkk");
    }

    #[test]
    fn test_publisher_with_underscores_in_raw_id() {
        assert_eq!(mock_stop("F01_289_volan").publisher(), "volan");
    }
}

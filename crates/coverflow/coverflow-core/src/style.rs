//! Optional style-interpolation capability.
//!
//! Hosts that configure `inner_css`/`outer_css` maps can inject an
//! interpolator to blend them along the coverflow curve. This replaces the
//! original ambient-plugin detection with an explicit injected capability;
//! without one, non-focal items carry no css.

use serde_json::{Map, Number, Value as JsonValue};

use crate::interp::lerp_f32;

/// Blends two css maps at parameter t in [0,1] (0 = inner, 1 = outer).
pub trait StyleInterpolator {
    fn blend(
        &self,
        inner: &Map<String, JsonValue>,
        outer: &Map<String, JsonValue>,
        t: f32,
    ) -> Map<String, JsonValue>;
}

/// Component-wise linear blend over the union of keys. Numeric pairs are
/// lerped; anything else holds the inner value until t reaches 1, then snaps
/// to the outer value.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearStyleInterpolator;

impl StyleInterpolator for LinearStyleInterpolator {
    fn blend(
        &self,
        inner: &Map<String, JsonValue>,
        outer: &Map<String, JsonValue>,
        t: f32,
    ) -> Map<String, JsonValue> {
        let t = t.clamp(0.0, 1.0);
        let mut out = Map::new();
        for (key, outer_val) in outer {
            let blended = match (inner.get(key), outer_val) {
                (Some(JsonValue::Number(a)), JsonValue::Number(b)) => {
                    let (a, b) = (a.as_f64().unwrap_or(0.0) as f32, b.as_f64().unwrap_or(0.0) as f32);
                    Number::from_f64(lerp_f32(a, b, t) as f64)
                        .map(JsonValue::Number)
                        .unwrap_or_else(|| outer_val.clone())
                }
                (Some(inner_val), _) if t < 1.0 => inner_val.clone(),
                _ => outer_val.clone(),
            };
            out.insert(key.clone(), blended);
        }
        // Inner-only keys fade out with the curve; hold them until fully outer.
        for (key, inner_val) in inner {
            if !out.contains_key(key) && t < 1.0 {
                out.insert(key.clone(), inner_val.clone());
            }
        }
        out
    }
}

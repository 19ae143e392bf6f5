//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SCREEN_WIDTH" | "SCREEN_HEIGHT" => validate_int_range(value, 1, 16384)?,
        "PAGE_LIGHT_THRESHOLD"
        | "PAGE_DARK_THRESHOLD"
        | "SEGMENT_LIGHT_THRESHOLD"
        | "SEGMENT_DARK_THRESHOLD" => validate_int_range(value, 0, 255)?,
        "MIN_GAP" | "MIN_SEGMENT_HEIGHT" => validate_int_range(value, 0, 100_000)?,
        "STRIP_ASPECT_RATIO" => {
            let v: f64 = value.parse().map_err(|_| "must be a float")?;
            if !v.is_finite() || v <= 0.0 {
                return Err("must be a positive number".into());
            }
        }
        "JPEG_QUALITY" => validate_int_range(value, 1, 100)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

/// One decimal place, or an em dash for an absent score
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "—".to_string(),
    }
}

/// Five-star row for the overall rating; absent ratings get a dash
pub fn star_row(filled: Option<u8>) -> String {
    match filled {
        Some(n) => {
            let n = n.min(5) as usize;
            format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
        }
        None => "—".to_string(),
    }
}

pub fn format_distance(km: f64) -> String {
    format!("{:.1} km", km)
}

pub const CURRENCY: &str = match option_env!("CURRENCY") {
    Some(c) => c,
    None => "₹",
};

/// Indian digit grouping: the last three digits form one group, every group
/// above that has two digits (`3245500` -> `"32,45,500"`).
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    let split = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(split);
    let head_bytes = head.as_bytes();
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }
    if !head.is_empty() {
        grouped.push(',');
    }
    grouped.push_str(tail);
    grouped
}

/// Formats a whole-rupee amount with the currency symbol and Indian digit
/// grouping (`3245500` -> `"₹32,45,500"`).
pub fn format_inr(amount: i64) -> String {
    let grouped = group_indian(amount.unsigned_abs());
    if amount < 0 {
        format!("-{}{}", CURRENCY, grouped)
    } else {
        format!("{}{}", CURRENCY, grouped)
    }
}

/// Case-insensitive substring containment over a row's display fields.
/// An empty or whitespace-only query matches everything. Every page filter
/// goes through this so search behaves the same across the console.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(500), "₹500");
        assert_eq!(format_inr(1500), "₹1,500");
        assert_eq!(format_inr(85000), "₹85,000");
        assert_eq!(format_inr(145000), "₹1,45,000");
        assert_eq!(format_inr(3245500), "₹32,45,500");
        assert_eq!(format_inr(12545000), "₹1,25,45,000");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(format_inr(-85000), "-₹85,000");
    }

    #[test]
    fn plain_counts_group_without_a_symbol() {
        assert_eq!(group_indian(142350), "1,42,350");
        assert_eq!(group_indian(999), "999");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(&["Chennai Silks", "Clothing"], ""));
        assert!(matches_query(&["Chennai Silks"], "   "));
    }

    #[test]
    fn matching_ignores_case_and_spans_fields() {
        let fields = ["T001", "Chennai Silks", "Clothing"];
        assert!(matches_query(&fields, "chennai"));
        assert!(matches_query(&fields, "SILKS"));
        assert!(matches_query(&fields, "cloth"));
        assert!(!matches_query(&fields, "electronics"));
    }
}

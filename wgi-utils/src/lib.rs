//! Shared utility functions for WGI crates.

/// Number and name formatting
pub mod format {
    /// Maximum number of fraction digits shown, matching `toLocaleString('id-ID')`.
    const MAX_FRACTION_DIGITS: usize = 3;

    /// Format a number the way Indonesian locale does: `.` groups thousands,
    /// `,` separates the fraction. Trailing fraction zeros are dropped.
    ///
    /// ```
    /// use wgi_utils::format::format_number;
    /// assert_eq!(format_number(1234567.5), "1.234.567,5");
    /// ```
    pub fn format_number(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };

        if frac_part.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{},{}", sign, grouped, frac_part)
        }
    }

    /// Replace every run of whitespace with a single `_`.
    pub fn underscore_whitespace(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut in_space = false;
        for ch in name.chars() {
            if ch.is_whitespace() {
                if !in_space {
                    out.push('_');
                }
                in_space = true;
            } else {
                out.push(ch);
                in_space = false;
            }
        }
        out
    }

    /// File-name slug of a dataset name: whitespace runs become `_`, lowercased.
    pub fn slug(name: &str) -> String {
        underscore_whitespace(name).to_lowercase()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_number_grouping() {
            assert_eq!(format_number(0.0), "0");
            assert_eq!(format_number(999.0), "999");
            assert_eq!(format_number(1000.0), "1.000");
            assert_eq!(format_number(48274162.0), "48.274.162");
        }

        #[test]
        fn test_format_number_fraction() {
            assert_eq!(format_number(12.5), "12,5");
            assert_eq!(format_number(72.345678), "72,346");
            assert_eq!(format_number(3.10), "3,1");
            assert_eq!(format_number(-1500.25), "-1.500,25");
        }

        #[test]
        fn test_format_number_negative_zero() {
            assert_eq!(format_number(-0.0001), "0");
        }

        #[test]
        fn test_slug() {
            assert_eq!(
                slug("Jumlah Penduduk per Provinsi"),
                "jumlah_penduduk_per_provinsi"
            );
            assert_eq!(slug("Indeks  Pembangunan\tManusia"), "indeks_pembangunan_manusia");
            assert_eq!(underscore_whitespace("Produk Domestik"), "Produk_Domestik");
        }
    }
}

/// Date utility functions
pub mod dates {
    use chrono::Datelike;

    /// The current calendar year in local time.
    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }

    /// `count` consecutive years ending at `last_year`, oldest first.
    pub fn trailing_years(last_year: i32, count: usize) -> Vec<i32> {
        let count = count as i32;
        ((last_year - count + 1)..=last_year).collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_trailing_years() {
            assert_eq!(
                trailing_years(2021, 7),
                vec![2015, 2016, 2017, 2018, 2019, 2020, 2021]
            );
            assert!(trailing_years(2021, 0).is_empty());
        }

        #[test]
        fn test_current_year_is_plausible() {
            assert!(current_year() >= 2024);
        }
    }
}

//! ロケール整形ヘルパー（es-PE）
//!
//! 通貨はソル（S/）・小数なし・千区切りカンマ。状態を持たない純関数のみ。

/// 整数部を3桁ごとにカンマ区切りする
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 通貨表示（例: 1234567.8 -> "S/ 1,234,568"）
///
/// 小数0桁へ四捨五入。負値は記号の前にマイナスを付ける。
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);
    let grouped = group_thousands(&digits);
    if negative {
        format!("-S/ {}", grouped)
    } else {
        format!("S/ {}", grouped)
    }
}

/// 数値表示（例: 98500 -> "98,500"）
pub fn format_number(value: i64) -> String {
    let negative = value < 0;
    let digits = format!("{}", value.unsigned_abs());
    let grouped = group_thousands(&digits);
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

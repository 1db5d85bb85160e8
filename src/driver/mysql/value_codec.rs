use chrono::{NaiveDate, NaiveTime};
use mysql_async::Value as MyValue;

use crate::driver::value::Value;

pub fn from_mysql_value(v: MyValue) -> Value {
    match v {
        MyValue::NULL => Value::Null,
        MyValue::Int(i) => Value::I64(i),
        MyValue::UInt(u) => Value::U64(u),
        MyValue::Float(f) => Value::F64(f as f64),
        MyValue::Double(d) => Value::F64(d),
        MyValue::Bytes(b) => Value::Bytes(b),
        MyValue::Date(y, m, d, h, min, s, micro) => {
            let date = NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32).unwrap_or_default();
            if h == 0 && min == 0 && s == 0 && micro == 0 {
                Value::Date(date)
            } else {
                let dt = date
                    .and_hms_micro_opt(h as u32, min as u32, s as u32, micro)
                    .unwrap_or_default();
                Value::DateTime(dt)
            }
        }
        MyValue::Time(is_neg, days, h, min, s, micro) => {
            // MySQL TIME reaches 838:59:59; magnitudes past 23:59:59 cannot
            // be a NaiveTime and keep the string form instead.
            let total_h = days * 24 + (h as u32);
            match NaiveTime::from_hms_micro_opt(total_h, min as u32, s as u32, micro) {
                Some(t) if is_neg => Value::Str(format!("-{}", t)),
                Some(t) => Value::Time(t),
                None => {
                    let sign = if is_neg { "-" } else { "" };
                    if micro > 0 {
                        Value::Str(format!(
                            "{}{:02}:{:02}:{:02}.{:06}",
                            sign, total_h, min, s, micro
                        ))
                    } else {
                        Value::Str(format!("{}{:02}:{:02}:{:02}", sign, total_h, min, s))
                    }
                }
            }
        }
    }
}

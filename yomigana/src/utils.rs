//! 内部で使用するユーティリティ関数

use csv_core::ReadFieldResult;

/// CSV形式の1行を列に分割します。
///
/// ダブルクォートで囲まれた列の中のカンマは区切りとして扱いません。
/// 空の行に対しては空のベクタを返します。
pub(crate) fn parse_csv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        bytes = &bytes[nin..];
        field.extend_from_slice(&output[..nout]);
        match result {
            // 入力を使い切った場合は空の入力を与えて列を確定させる
            ReadFieldResult::InputEmpty | ReadFieldResult::OutputFull => {}
            ReadFieldResult::Field { record_end } => {
                fields.push(String::from_utf8_lossy(&field).into_owned());
                field.clear();
                if record_end {
                    return fields;
                }
            }
            ReadFieldResult::End => return fields,
        }
    }
}

use pickleprims_codec::{bytes_to_int, int_to_bytes};

use crate::cmd::{parse_hex, IntAction};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_conversion, Conversion, OutputFormat};

pub fn run(action: IntAction, format: OutputFormat) -> CliResult<i32> {
    let conversion = match action {
        IntAction::Decode(args) => {
            let bytes = parse_hex(&args.hex)?;
            let value =
                bytes_to_int(&bytes).map_err(|err| codec_error("int decode failed", err))?;
            let variant = if bytes.len() == 2 { "u16" } else { "i32" };
            Conversion::new("int.decode", hex::encode(&bytes), value.to_string())
                .with_variant(variant)
        }
        IntAction::Encode(args) => {
            let bytes = int_to_bytes(args.value);
            Conversion::new("int.encode", args.value.to_string(), hex::encode(&bytes))
                .with_variant("i32")
                .with_raw(bytes.to_vec())
        }
    };

    print_conversion(&conversion, format);
    Ok(SUCCESS)
}

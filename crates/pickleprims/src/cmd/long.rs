use pickleprims_codec::{decode_long, encode_long, BigInt, Number};
use tracing::debug;

use crate::cmd::{parse_hex, LongAction};
use crate::exit::{CliError, CliResult, SUCCESS};
use crate::output::{print_conversion, Conversion, OutputFormat};

pub fn run(action: LongAction, format: OutputFormat) -> CliResult<i32> {
    let conversion = match action {
        LongAction::Decode(args) => {
            let bytes = parse_hex(&args.hex)?;
            debug!(len = bytes.len(), "decoding long");
            let value = decode_long(&bytes);
            Conversion::new("long.decode", hex::encode(&bytes), value.to_string())
                .with_variant(variant_name(&value))
        }
        LongAction::Encode(args) => {
            let value: BigInt = args.value.trim().parse().map_err(|err| {
                CliError::usage(format!("invalid integer {:?}: {err}", args.value))
            })?;
            let bytes = encode_long(&value);
            let variant = variant_name(&Number::from(value.clone()));
            Conversion::new("long.encode", value.to_string(), hex::encode(&bytes))
                .with_variant(variant)
                .with_raw(bytes)
        }
    };

    print_conversion(&conversion, format);
    Ok(SUCCESS)
}

fn variant_name(value: &Number) -> &'static str {
    match value {
        Number::Int(_) => "int",
        Number::Big(_) => "big",
    }
}

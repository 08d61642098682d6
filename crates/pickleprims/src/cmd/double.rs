use pickleprims_codec::{bytes_to_double, double_to_bytes};

use crate::cmd::{parse_hex, DoubleAction};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_conversion, Conversion, OutputFormat};

pub fn run(action: DoubleAction, format: OutputFormat) -> CliResult<i32> {
    let conversion = match action {
        DoubleAction::Decode(args) => {
            let bytes = parse_hex(&args.hex)?;
            let value =
                bytes_to_double(&bytes).map_err(|err| codec_error("double decode failed", err))?;
            Conversion::new("double.decode", hex::encode(&bytes), format!("{value:?}"))
        }
        DoubleAction::Encode(args) => {
            let bytes = double_to_bytes(args.value);
            Conversion::new("double.encode", format!("{:?}", args.value), hex::encode(&bytes))
                .with_raw(bytes.to_vec())
        }
    };

    print_conversion(&conversion, format);
    Ok(SUCCESS)
}

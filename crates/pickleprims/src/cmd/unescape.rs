use pickleprims_codec::{bytes_from_raw_string, decode_escaped, decode_unicode_escaped};

use crate::cmd::UnescapeArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_conversion, Conversion, OutputFormat};

pub fn run(args: UnescapeArgs, format: OutputFormat) -> CliResult<i32> {
    let conversion = if args.unicode {
        let decoded = decode_unicode_escaped(&args.text)
            .map_err(|err| codec_error("unescape failed", err))?;
        Conversion::new("unescape.unicode", args.text.clone(), decoded.into_owned())
    } else {
        let decoded =
            decode_escaped(&args.text).map_err(|err| codec_error("unescape failed", err))?;
        let mut conversion =
            Conversion::new("unescape.bytes", args.text.clone(), decoded.clone().into_owned());
        // \xHH escapes stand for single bytes; raw output writes them unencoded.
        if matches!(format, OutputFormat::Raw) {
            let raw = bytes_from_raw_string(&decoded)
                .map_err(|err| codec_error("unescape failed", err))?;
            conversion = conversion.with_raw(raw);
        }
        conversion
    };

    print_conversion(&conversion, format);
    Ok(SUCCESS)
}

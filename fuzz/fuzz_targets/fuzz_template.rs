#![no_main]

use libfuzzer_sys::fuzz_target;
use stackctl::infrastructure::templates::TemplateFormat;
use stackctl::infrastructure::FsTemplateLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for format in [TemplateFormat::Json, TemplateFormat::Yaml] {
            if let Ok(template) = FsTemplateLoader::parse(content, format) {
                // A parsed template always re-serializes
                let _ = template.parameter_names();
                assert!(template.to_compact_json().is_ok());
            }
        }
    }
});

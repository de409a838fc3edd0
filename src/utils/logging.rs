#[cfg(feature = "fern")]
pub fn init_logger(
    min_level: log::LevelFilter, log_file_name: &std::ffi::OsStr,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // UTC rather than local time; reading the local offset is not
            // sound on multi-threaded processes, and this runs inside servers.
            let now = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                now.format(&time::macros::format_description!(
                    // "[[[" escapes a literal "[".
                    // See https://time-rs.github.io/book/api/format-description.html
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
                ))
                .unwrap(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(log_file_name)?)
        .apply()?;

    Ok(())
}

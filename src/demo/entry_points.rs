/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::Settings;
use crate::logging::GlobalLogger;
use crate::shader;

use std::ffi::OsStr;
use std::io;

use clap::{App, Arg, ArgMatches};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("glic-shade")
        .about("Renders a fragment shader on the CPU.")
        .args(&[
            Arg::with_name("config").long("config").short("c").takes_value(true)
                .value_name("CONFIG").help("settings yaml"),
            Arg::with_name("shader").long("shader").takes_value(true)
                .value_name("NAME").help("which shader to render [choices: plasma, sphere]"),
            Arg::with_name("width").long("width").takes_value(true)
                .value_name("PIXELS"),
            Arg::with_name("height").long("height").takes_value(true)
                .value_name("PIXELS"),
            Arg::with_name("time").long("time").short("t").takes_value(true)
                .value_name("SECONDS").help("animation time"),
            Arg::with_name("output").long("output").short("o").takes_value(true)
                .value_name("OUTPUT").help("write a binary PPM here")
                .required_unless("ascii"),
            Arg::with_name("ascii").long("ascii")
                .help("print a text preview to stdout"),
            Arg::with_name("log").long("log").takes_value(true)
                .value_name("LOGFILE").help("also write the log here"),
            Arg::with_name("verbose").short("v").multiple(true)
                .help("more logging (repeatable)"),
        ])
}

/// Settings from `--config`, with the individual flags applied on top.
fn resolve_settings(m: &ArgMatches) -> FailResult<Settings>
{
    let mut settings = match m.value_of("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(s) = m.value_of("shader") {
        settings.shader = s.parse()?;
    }
    if let Some(s) = m.value_of("width") {
        settings.width = s.parse().map_err(|e| format_err!("--width: {}", e))?;
    }
    if let Some(s) = m.value_of("height") {
        settings.height = s.parse().map_err(|e| format_err!("--height: {}", e))?;
    }
    if let Some(s) = m.value_of("time") {
        settings.time = s.parse().map_err(|e| format_err!("--time: {}", e))?;
    }
    settings.validate()?;
    Ok(settings)
}

// %% CRATES: binary: glic-shade %%
pub fn glic_shade() {
    wrap_result_main(|| {
        let matches = app().get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        let settings = resolve_settings(&matches)?;
        debug!("settings: {:?}", settings);

        info!("rendering '{}' at {}x{}", settings.shader, settings.width, settings.height);
        let image = shader::render(&*shader::from_settings(&settings), settings.width, settings.height);

        if let Some(path) = matches.value_of("output") {
            image.save_ppm(path)?;
            info!("wrote {}", path);
        }
        if matches.is_present("ascii") {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            io::Write::write_all(&mut stdout, image.to_ascii().as_bytes())?;
        }
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShaderKind;

    fn settings_from(args: &[&str]) -> FailResult<Settings>
    {
        let mut argv = vec!["glic-shade"];
        argv.extend_from_slice(args);
        let matches = app().get_matches_from_safe(argv)?;
        resolve_settings(&matches)
    }

    #[test]
    fn flags_override_defaults() {
        let settings = settings_from(&["--ascii", "--shader", "sphere", "--width", "12", "-t", "1.5"]).unwrap();
        assert_eq!(settings.shader, ShaderKind::Sphere);
        assert_eq!(settings.width, 12);
        assert_eq!(settings.height, Settings::default().height);
        assert_eq!(settings.time, 1.5);
    }

    #[test]
    fn bad_flags() {
        assert!(settings_from(&["--ascii", "--shader", "teapot"]).is_err());
        assert!(settings_from(&["--ascii", "--width", "wide"]).is_err());
        assert!(settings_from(&["--ascii", "--height", "0"]).is_err());
        // needs somewhere to put the output
        assert!(settings_from(&[]).is_err());
    }

    #[test]
    fn missing_config_file() {
        let err = settings_from(&["--ascii", "--config", "/nonexistent/glic.yaml"]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/glic.yaml"));
    }
}

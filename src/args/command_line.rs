//! Raw command line access and program-token stripping.

/// Strip the program's own path token and the whitespace after it.
///
/// A token starting with `"` runs through the next `"` (or to the end when
/// unterminated); otherwise it runs up to the first space or tab.
pub fn strip_program_name(raw: &str) -> &str {
    let rest = if let Some(quoted) = raw.strip_prefix('"') {
        match quoted.find('"') {
            Some(end) => &quoted[end + 1..],
            None => "",
        }
    } else {
        match raw.find([' ', '\t']) {
            Some(end) => &raw[end..],
            None => "",
        }
    };
    rest.trim_start_matches([' ', '\t'])
}

/// The full command line this process was started with, program token
/// included.
#[cfg(windows)]
pub fn raw_command_line() -> String {
    use windows_sys::Win32::System::Environment::GetCommandLineW;

    // SAFETY: GetCommandLineW returns a pointer to a NUL-terminated string
    // owned by the process that stays valid for its whole lifetime.
    let wide = unsafe {
        let ptr = GetCommandLineW();
        if ptr.is_null() {
            return String::new();
        }
        let mut len = 0;
        while *ptr.add(len) != 0 {
            len += 1;
        }
        std::slice::from_raw_parts(ptr, len)
    };
    String::from_utf16_lossy(wide)
}

/// The full command line this process was started with, program token
/// included.
///
/// Other hosts only expose split arguments, so they are joined back with
/// single spaces. The program token is quoted when it contains whitespace
/// so [`strip_program_name`] removes exactly that token.
#[cfg(not(windows))]
pub fn raw_command_line() -> String {
    let mut args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_default();
    let mut line = if program.contains([' ', '\t']) {
        format!("\"{program}\"")
    } else {
        program
    };
    for arg in args {
        line.push(' ');
        line.push_str(&arg);
    }
    line
}

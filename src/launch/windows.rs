use std::ffi::OsStr;
use std::iter::once;
use std::mem;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, BOOL, FALSE, TRUE};
use windows_sys::Win32::System::Console::{
    GetStdHandle, SetConsoleCtrlHandler, STD_ERROR_HANDLE, STD_INPUT_HANDLE, STD_OUTPUT_HANDLE,
};
use windows_sys::Win32::System::Threading::{
    CreateProcessW, WaitForSingleObject, INFINITE, PROCESS_INFORMATION, STARTF_USESTDHANDLES,
    STARTUPINFOW,
};

use super::{LaunchError, Launcher};

/// Starts the shell on the caller's console and waits for it to exit.
pub struct ConsoleLauncher {
    shell: String,
}

impl ConsoleLauncher {
    pub fn new(shell: String) -> Self {
        Self { shell }
    }
}

impl Launcher for ConsoleLauncher {
    fn launch(&mut self, command_line: &str) -> Result<(), LaunchError> {
        let _ctrl = CtrlEventGuard::install();

        let application = to_wide(&self.shell);
        // CreateProcessW may write into the command line buffer.
        let mut command = to_wide(command_line);

        let mut si: STARTUPINFOW = unsafe { mem::zeroed() };
        si.cb = mem::size_of::<STARTUPINFOW>() as u32;
        si.dwFlags = STARTF_USESTDHANDLES;
        unsafe {
            si.hStdInput = GetStdHandle(STD_INPUT_HANDLE);
            si.hStdOutput = GetStdHandle(STD_OUTPUT_HANDLE);
            si.hStdError = GetStdHandle(STD_ERROR_HANDLE);
        }

        let mut pi: PROCESS_INFORMATION = unsafe { mem::zeroed() };

        let created = unsafe {
            CreateProcessW(
                application.as_ptr(),
                command.as_mut_ptr(),
                ptr::null(),
                ptr::null(),
                TRUE,
                0,
                ptr::null(),
                ptr::null(),
                &si,
                &mut pi,
            )
        };
        if created == 0 {
            let code = unsafe { GetLastError() };
            tracing::error!(shell = %self.shell, code, "CreateProcessW failed");
            return Err(LaunchError::CreateProcess {
                shell: self.shell.clone(),
                code,
            });
        }

        let pi = scopeguard::guard(pi, |pi| unsafe {
            CloseHandle(pi.hThread);
            CloseHandle(pi.hProcess);
        });
        tracing::debug!(pid = pi.dwProcessId, "shell started");

        unsafe {
            WaitForSingleObject(pi.hProcess, INFINITE);
        }
        tracing::debug!(pid = pi.dwProcessId, "shell exited");
        Ok(())
    }
}

/// Keeps console control events (Ctrl-C, Ctrl-Break) from terminating the
/// shim while the child shell is running. The child still receives them.
struct CtrlEventGuard;

impl CtrlEventGuard {
    fn install() -> Self {
        unsafe {
            SetConsoleCtrlHandler(Some(ignore_ctrl_event), TRUE);
        }
        Self
    }
}

impl Drop for CtrlEventGuard {
    fn drop(&mut self) {
        unsafe {
            SetConsoleCtrlHandler(Some(ignore_ctrl_event), FALSE);
        }
    }
}

unsafe extern "system" fn ignore_ctrl_event(_ctrl_type: u32) -> BOOL {
    TRUE
}

fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(once(0)).collect()
}

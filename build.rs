fn main() {
    // Shell path and injection payload are baked in with option_env!.
    println!("cargo:rerun-if-env-changed=CLINK_CMD_EXECUTABLE");
    println!("cargo:rerun-if-env-changed=CLINK_CMD_INJECT");
}

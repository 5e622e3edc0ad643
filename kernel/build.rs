fn main() {
    if std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() == Ok("riscv64") {
        let dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
        println!("cargo:rustc-link-arg=-T{dir}/linker.ld");
        println!("cargo:rerun-if-changed=linker.ld");
        println!("cargo:rerun-if-changed=src/entry.S");
        println!("cargo:rerun-if-changed=src/trap/trap.asm");
    }
}

fn main() -> anyhow::Result<()> {
    xlsform::cli::main()
}

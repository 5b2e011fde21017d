pub fn run() -> anyhow::Result<()> {
    println!("ticketlens {}", env!("CARGO_PKG_VERSION"));
    println!("Customer support ticket analysis");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}

use intake::core::*;

fn main() {
    // As-you-type masking
    println!("=== Masks ===\n");

    let mut field = String::new();
    for c in "01310930".chars() {
        field.push(c);
        field = format_cep(&field);
        println!("  CEP keystroke '{c}' => {field}");
    }
    println!();
    println!("  CPF 52998224725 => {}", format_cpf("52998224725"));
    println!("  RG  123456789   => {}", format_rg("123456789"));
    println!("  unmask(529.982.247-25) => {}", unmask("529.982.247-25"));

    // CPF checksum
    println!("\n=== CPF Validation ===\n");

    let candidates = [
        "52998224725",
        "529.982.247-25",
        "529.982.247-24", // wrong check digit
        "11111111111",    // repeated digits
        "5299822472",     // too short
    ];
    for cpf in &candidates {
        let verdict = if validate_cpf(cpf) { "valid" } else { "INVALID" };
        println!("  {cpf} => {verdict}");
    }

    // Field schema
    println!("\n=== Field Schema ===\n");

    let input = FormInputBuilder::new()
        .name("Al")
        .email("al@")
        .cpf("52998224724")
        .cep("0131")
        .build();
    for (field, message) in validate(&input).iter() {
        println!("  {field}: {message}");
    }

    // Display dates
    println!("\n=== Display Dates ===\n");
    if let Ok(date) = parse_display_date("07/03/1990") {
        println!("  07/03/1990 => {date} ({})", date::month_caption(date));
    }
}

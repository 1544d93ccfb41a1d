use console::Style;
use wasted_core::catalog::Product;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    price: Style,
    muted: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().magenta().bold(),
            header: Style::new().magenta().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            price: Style::new().green(),
            muted: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_catalog(products: &[&Product]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Featured Drops"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    if products.is_empty() {
        println!("  {}", s.muted.apply_to("no products"));
        println!();
        return;
    }

    for p in products {
        let colors = if p.has_variants() {
            format!("{} colors", p.colors.len())
        } else {
            "-".to_string()
        };
        println!(
            "  {:>3}  {:<20}{:>10}  {}",
            s.label.apply_to(p.id),
            s.value.apply_to(&p.name),
            s.price.apply_to(&p.price),
            s.muted.apply_to(colors)
        );
    }
    println!();
}

pub fn print_product(p: &Product) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&p.name));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(p.name.chars().count())));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Id"), s.value.apply_to(p.id));
    println!("  {:<14}{}", s.label.apply_to("Price"), s.price.apply_to(&p.price));
    println!("  {:<14}{}", s.label.apply_to("Sizes"), s.value.apply_to(&p.sizes));
    println!("  {:<14}{}", s.label.apply_to("Image"), s.path.apply_to(&p.image));
    println!();

    println!("  {}", s.header.apply_to("Description"));
    println!("    {}", p.description);
    println!();
    println!("  {}", s.header.apply_to("Verdict"));
    println!("    {}", p.verdict);
    println!();

    if p.has_variants() {
        println!("  {}", s.header.apply_to("Available Colors"));
        for (i, v) in p.colors.iter().enumerate() {
            println!(
                "    {:>2}  {:<16}{}",
                s.label.apply_to(i),
                s.value.apply_to(&v.color),
                s.path.apply_to(&v.image)
            );
        }
        println!();
    }
}

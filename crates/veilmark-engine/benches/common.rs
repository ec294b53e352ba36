// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_blog_content(size: usize) -> String {
    let base = "# Vestidos de noiva\n\n\
                Experimente **qualquer modelo** com o nosso *provador virtual*.\n\n\
                ## Como funciona\n\
                1. Envie uma foto\n\
                2. Escolha o __modelo__\n\
                3. Veja o ***resultado***\n\n\
                - Renda\n\
                - Tule com <b>brilho</b>\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        match i % 4 {
            0 => line.push_str(&format!("**bold {i}** ")),
            1 => line.push_str(&format!("*italic {i}* ")),
            2 => line.push_str(&format!("__underline {i}__ ")),
            _ => line.push_str(&format!("***both {i}*** ")),
        }
    }
    line
}

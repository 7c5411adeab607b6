use prevalence::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "photo.jpg".to_string());
    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let colors = prevalence::DominantColors::from_image(buf)
        .resize_image_area(112 * 112)
        .generate()
        .unwrap();

    for color in colors.colors() {
        println!("{} - {}%", color.hex(), color.percent());
    }
}

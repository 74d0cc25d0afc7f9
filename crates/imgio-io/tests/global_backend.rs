use imgio_image::{GenericImage, Image, SampleType};
use imgio_io::{
    current_backend, functional as F, use_backend, Backend, ColorMode, ErrorKind, IoError,
};

// the backend is process-wide, so every check that switches it lives in one test
#[test]
fn switch_process_backend() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("photos").join("photo.jpg");

    let image: GenericImage = Image::<u8, 3>::from_size_val([100, 100].into(), 77)?.into();
    F::imwrite(&image, &file_path, &[], true)?;

    assert_eq!(current_backend(), Backend::NativeCodec);
    let native = F::imread(&file_path, ColorMode::Grayscale)?;
    assert_eq!(native.shape(), [100, 100, 1]);
    assert_eq!(native.dtype(), SampleType::U8);

    let unchanged = F::imread(&file_path, ColorMode::Unchanged)?;
    assert_eq!(unchanged.num_channels(), 3);

    use_backend("fast-jpeg")?;
    assert_eq!(current_backend(), Backend::FastJpeg);

    let fast = F::imread(&file_path, ColorMode::Grayscale)?;
    assert_eq!(fast.shape(), [100, 100, 1]);
    assert_eq!(fast.dtype(), SampleType::U8);

    // earlier results are owned by the caller
    assert_eq!(native.shape(), [100, 100, 1]);

    let err = F::imread(&file_path, ColorMode::Unchanged).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let bytes = std::fs::read(&file_path)?;
    let err = F::imfrombytes(&bytes, ColorMode::Unchanged).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(F::imfrombytes(&bytes, ColorMode::Color)?.shape(), [100, 100, 3]);

    let err = F::imread(tmp_dir.path().join("nope.jpg"), ColorMode::Color).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // writing still goes through the general purpose codec
    F::imwrite(&fast, tmp_dir.path().join("gray.png"), &[], true)?;

    let err = use_backend("opencv").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    assert_eq!(current_backend(), Backend::FastJpeg);

    use_backend("native-codec")?;
    assert_eq!(current_backend(), Backend::NativeCodec);
    let err = F::imread(tmp_dir.path().join("nope.jpg"), ColorMode::Color).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

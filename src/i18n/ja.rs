use super::MessageKey;

pub(super) fn text(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        MainCopy => "チョコレートの数学。",
        SubCopy => "豆由来成分と追加カカオバターの比率を、数式で完全にコントロール。",
        OneLiner => "ニブの重さと目標カカオ％から、理想の配合を一瞬で計算します。",

        Parameters => "パラメータ",
        NibWeight => "ニブ重量",
        NibWeightDesc => "使用するカカオニブの総重量（g）を入力します。",
        TargetCacao => "目標カカオ分",
        TargetCacaoDesc => {
            "完成品における合計カカオ成分（ニブ由来＋追加カカオバター）の目標値です。"
        }
        RecipeDetails => "レシピ詳細",
        OtherIngredients => "その他成分",
        OtherIngredientsDesc => {
            "ミルクパウダーなど、カカオと砂糖以外の副材料が全体に占める割合です。"
        }
        CacaoButterInOther => "（内訳）カカオバター比率",
        CacaoButterInOtherDesc => "「その他成分」のうち、カカオバターが占める割合を指定します。",

        CacaoProfile => "カカオプロファイル",
        TotalCacao => "合計カカオ分",
        Breakdown => "内訳",
        FromNibs => "ニブ由来",
        FromOtherButter => "その他由来バター",
        Composition => "配合構成",
        Sugar => "砂糖",
        Other => "その他成分",
        Measurement => "計量（g）",
        Nibs => "ニブ",
        CacaoButter => "カカオバター",
        TotalBatchWeight => "総重量",
        CalculationDetails => "計算プロセス",
        CalcCbFromOther => "その他由来カカオバター",
        CalcNibCacao => "ニブ由来カカオ",
        CalcBatchFactor => "バッチ係数",
        CalcSugarPct => "砂糖％",
        CalcWeights => "重量",

        Warning => "注意",
        Error => "エラー",

        ErrNibWeightTitle => "ニブ重量が範囲外です",
        ErrNibWeightRange => "ニブ重量は100 g〜20,000 gの範囲で入力してください。",
        ErrTargetCacaoTitle => "目標カカオ分が範囲外です",
        ErrTargetCacaoRange => "目標カカオ分は40%〜90%の範囲で入力してください。",
        ErrOtherTitle => "その他成分が範囲外です",
        ErrOtherRange => "その他成分は0%〜40%の範囲で入力してください。",
        ErrButterTitle => "カカオバター比率が範囲外です",
        ErrButterRange => "カカオバター比率は0%〜100%の範囲で入力してください。",

        ErrNibsCacaoTitle => "カカオ分の設定に無理があります",
        ErrNibsCacaoMsg => {
            "ミルクパウダー（その他）とその中のカカオバター量が、目標のカカオ％を超えています。\
             目標カカオ％を上げる、その他％を下げる、その他中のカカオバター％を下げる、\
             のいずれかを調整してください。"
        }
        ErrNoSugarTitle => "砂糖を入れる余地がありません",
        ErrNoSugarMsg => {
            "現在の設定では、カカオ分とその他成分だけで100％を超えています。\
             目標カカオ％を下げる、その他％を下げる、その他中のカカオバター％を下げることで、\
             砂糖のスペースを作ることができます。"
        }

        WarnDarkCacaoRange => {
            "ダークチョコとして一般的な範囲（60〜85％）から外れています。\
             意図的な設計であれば問題ありません。"
        }
        WarnMilkCacaoRange => {
            "ミルク入りレシピとして一般的なカカオ分（40〜60％）から外れています。\
             口溶けや甘味バランスに注意してください。"
        }
        WarnOtherHigh => {
            "その他成分が25％を超えています。\
             チョコレートらしさより\"フィラー感\"が強くなる可能性があります。"
        }
        WarnButterHigh => {
            "その他中のカカオバターが60％を超えています。\
             脂肪分過多でテンパリングや口溶けに影響する可能性があります。"
        }
        WarnSmallBatch => {
            "非常に小さいバッチです。\
             テストバッチとして扱われることが多く、製造条件の再現性に注意が必要です。"
        }
        WarnSugarUltraLow => "砂糖が5％未満です。ほとんど甘味のない\"超ビター\"な配合になります。",
        WarnSugarLow => {
            "砂糖がかなり控えめです。カカオの個性を最重視する\"マニア向け\"レシピになります。"
        }
        WarnSugarHigh => {
            "砂糖が50％を超えています。\
             一般的なBean to Barから大きく外れた配合で、口溶けやテクスチャに注意が必要です。"
        }

        PromptChooseAction => "どの項目を変更しますか？",
        PromptEnterValue => "新しい値を入力",
        ActionSwitchLanguage => "言語を切り替え (English)",
        ActionReset => "初期値に戻す",
        ActionQuit => "終了",
    }
}
